//! Personality Insights v3: personality profiles from authored text.

mod client;
mod types;

pub use client::{PersonalityInsights, SERVICE};
pub use types::{
    AcceptLanguage, Behavior, BehaviorBuilder, ConsumptionPreferences,
    ConsumptionPreferencesBuilder, ConsumptionPreferencesCategory,
    ConsumptionPreferencesCategoryBuilder, Content, ContentBuilder, ContentItem,
    ContentItemBuilder, ContentItemContentType, ContentItemLanguage, ContentLanguage, Profile,
    ProfileBuilder, ProfileContentType, ProfileOptions, ProfileOptionsBuilder, Trait,
    TraitBuilder, Warning, WarningBuilder,
};
