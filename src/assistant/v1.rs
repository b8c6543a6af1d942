//! Assistant v1 entity-value options.

use crate::{options_model, wire_enum};
use serde_json::Value;
use std::collections::HashMap;

wire_enum! {
    /// How an entity value is recognized.
    pub enum ValueType {
        Synonyms => "synonyms",
        Patterns => "patterns",
    }
}

wire_enum! {
    /// Sort order for [`ListValuesOptions`].
    pub enum ListValuesSort {
        Value => "value",
        Updated => "updated",
    }
}

options_model! {
    /// Creates a new value for an entity.
    pub struct CreateValueOptions => CreateValueOptionsBuilder;
    Post "/v1/workspaces/{workspace_id}/entities/{entity}/values"
    {
        workspace_id: String [required, path "workspace_id"],
        entity: String [required, path "entity"],
        /// Text of the value; no leading or trailing whitespace.
        value: String [required, body "value"],
        metadata: HashMap<String, Value> [optional, body "metadata"],
        value_type: ValueType [optional, body "type"],
        /// Synonyms; only valid with [`ValueType::Synonyms`].
        synonyms: Vec<String> [list(add_synonym: String), body "synonyms"],
        /// Regular expressions; only valid with [`ValueType::Patterns`].
        patterns: Vec<String> [list(add_pattern: String), body "patterns"],
        include_audit: bool [optional, query "include_audit"],
    }
}

options_model! {
    pub struct GetValueOptions => GetValueOptionsBuilder;
    Get "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}"
    {
        workspace_id: String [required, path "workspace_id"],
        entity: String [required, path "entity"],
        value: String [required, path "value"],
        /// Include all element content.
        export: bool [optional, query "export"],
        include_audit: bool [optional, query "include_audit"],
    }
}

options_model! {
    /// Updates an existing entity value. Omitted `new_*` fields keep their
    /// current content unless `append` is false.
    pub struct UpdateValueOptions => UpdateValueOptionsBuilder;
    Post "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}"
    {
        workspace_id: String [required, path "workspace_id"],
        entity: String [required, path "entity"],
        value: String [required, path "value"],
        new_value: String [optional, body "value"],
        new_metadata: HashMap<String, Value> [optional, body "metadata"],
        new_type: ValueType [optional, body "type"],
        new_synonyms: Vec<String> [list(add_new_synonyms: String), body "synonyms"],
        new_patterns: Vec<String> [list(add_new_patterns: String), body "patterns"],
        /// Merge new data into the existing value instead of replacing it.
        append: bool [optional, query "append"],
        include_audit: bool [optional, query "include_audit"],
    }
}

options_model! {
    pub struct DeleteValueOptions => DeleteValueOptionsBuilder;
    Delete "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}"
    {
        workspace_id: String [required, path "workspace_id"],
        entity: String [required, path "entity"],
        value: String [required, path "value"],
    }
}

options_model! {
    pub struct ListValuesOptions => ListValuesOptionsBuilder;
    Get "/v1/workspaces/{workspace_id}/entities/{entity}/values"
    {
        workspace_id: String [required, path "workspace_id"],
        entity: String [required, path "entity"],
        export: bool [optional, query "export"],
        page_limit: i64 [optional, query "page_limit"],
        include_count: bool [optional, query "include_count"],
        sort: ListValuesSort [optional, query "sort"],
        cursor: String [optional, query "cursor"],
        include_audit: bool [optional, query "include_audit"],
    }
}

options_model! {
    /// An entity value as returned by the service.
    pub struct EntityValue => EntityValueBuilder
    {
        value: String [required, body "value"],
        metadata: HashMap<String, Value> [optional, body "metadata"],
        value_type: ValueType [optional, body "type"],
        synonyms: Vec<String> [list(add_synonym: String), body "synonyms"],
        patterns: Vec<String> [list(add_pattern: String), body "patterns"],
        created: String [optional, body "created"],
        updated: String [optional, body "updated"],
    }
}

options_model! {
    pub struct ValueCollection => ValueCollectionBuilder
    {
        values: Vec<EntityValue> [required(add_value: EntityValue), body "values"],
        pagination: Value [optional, body "pagination"],
    }
}
