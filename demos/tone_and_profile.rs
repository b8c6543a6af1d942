//! Tone and personality example
//!
//! Analyzes the tone of a short passage, then builds a personality profile
//! from the same text.
//!
//! Credentials are read from environment variables (or the OS keyring):
//! - TONE_ANALYZER_APIKEY / TONE_ANALYZER_URL
//! - PERSONALITY_INSIGHTS_APIKEY / PERSONALITY_INSIGHTS_URL
//!
//! Usage:
//!   RUST_LOG=watson_sdk=debug cargo run --example tone_and_profile

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use watson_sdk::personality_insights::{AcceptLanguage, PersonalityInsights, ProfileOptions};
use watson_sdk::tone_analyzer::{Tone, ToneAnalyzer, ToneOptions};

const TEXT: &str = "I know the times are difficult! Our sales have been disappointing for \
    the past three quarters for our data analytics product suite. We have a competitive data \
    analytics product suite in the industry. But we need to do our job selling it!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tone = ToneAnalyzer::from_env("2017-09-21").context("configuring Tone Analyzer")?;
    let options = ToneOptions::builder()
        .text(TEXT)
        .add_tone(Tone::Emotion)
        .add_tone(Tone::Language)
        .build()?;
    let analysis = tone.tone(options).await.context("tone request")?;

    for score in analysis.document_tone().tones().unwrap_or_default() {
        println!("{:<12} {:.2}", score.tone_name(), score.score());
    }

    let insights =
        PersonalityInsights::from_env("2017-10-13").context("configuring Personality Insights")?;
    let options = ProfileOptions::builder()
        .text(TEXT.repeat(20))
        .accept_language(AcceptLanguage::En)
        .raw_scores(true)
        .build()?;
    let profile = insights.profile(options).await.context("profile request")?;

    println!("\nprocessed {} words", profile.word_count());
    for characteristic in profile.personality() {
        println!("{:<24} {:.2}", characteristic.name(), characteristic.percentile());
    }

    Ok(())
}
