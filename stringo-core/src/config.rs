//! Configuration management for `stringo-core`.
//!
//! A configuration names reusable check policies (length bounds plus a
//! [`ChkRule`] set) and transform recipes (a stored [`Pipeline`]). This module
//! handles YAML (de)serialization and provides loading, merging, validation
//! and lookup.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::engines::check_engine::{check_str, ChkResult, ChkRule};
use crate::engines::transform_engine::TransformFlag;
use crate::errors::StringoError;
use crate::pipeline::{Pipeline, PipelineMode};

/// Maximum allowed length for a policy or recipe name.
pub const MAX_POLICY_NAME_LENGTH: usize = 64;

/// A named check configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckPolicy {
    /// Unique identifier (e.g., "username").
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Minimum codepoint count; 0 disables the bound.
    #[serde(default)]
    pub min_len: usize,
    /// Maximum codepoint count; 0 disables the bound.
    #[serde(default)]
    pub max_len: usize,
    #[serde(default = "ChkRule::empty")]
    pub rules: ChkRule,
}

impl CheckPolicy {
    /// Runs the check engine with this policy's bounds and rules.
    pub fn check(&self, input: &str) -> ChkResult {
        check_str(input, self.min_len, self.max_len, self.rules)
    }
}

/// A named transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransformRecipe {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mode: PipelineMode,
    /// Output limit in codepoints; 0 means unlimited.
    #[serde(default)]
    pub max_len: usize,
    pub steps: Vec<TransformFlag>,
}

impl TransformRecipe {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::from_steps(self.mode, &self.steps, self.max_len)
    }

    pub fn apply(&self, input: &str) -> String {
        self.pipeline().apply(input)
    }
}

/// The top-level configuration structure.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StringoConfig {
    pub policies: Vec<CheckPolicy>,
    pub recipes: Vec<TransformRecipe>,
}

impl StringoConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom policies from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: StringoConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded {} policies and {} recipes from file {}.",
            config.policies.len(),
            config.recipes.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the built-in policies and recipes from the embedded configuration.
    pub fn load_default_policies() -> Result<Self> {
        debug!("Loading default policies from embedded string...");
        let default_yaml = include_str!("../config/default_policies.yaml");
        let config: StringoConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default policies")?;

        debug!(
            "Loaded {} default policies and {} default recipes.",
            config.policies.len(),
            config.recipes.len()
        );
        Ok(config)
    }

    /// Checks names, bounds and recipe steps; contradictory rule sets only produce a warning.
    pub fn validate(&self) -> Result<(), StringoError> {
        let mut errors = Vec::new();

        let mut policy_names = HashSet::new();
        for policy in &self.policies {
            check_name("policy", &policy.name, &mut policy_names, &mut errors);

            if policy.max_len > 0 && policy.min_len > policy.max_len {
                errors.push(format!(
                    "Policy '{}' has min_len {} greater than max_len {}.",
                    policy.name, policy.min_len, policy.max_len
                ));
            }

            for (deny, require) in policy.rules.contradictions() {
                warn!(
                    "Policy '{}' combines {:?} with {:?}; no non-empty input can pass it.",
                    policy.name, deny, require
                );
            }
        }

        let mut recipe_names = HashSet::new();
        for recipe in &self.recipes {
            check_name("recipe", &recipe.name, &mut recipe_names, &mut errors);

            if recipe.steps.is_empty() {
                errors.push(format!("Recipe '{}' has no steps.", recipe.name));
            }
        }

        if !errors.is_empty() {
            let full_error_message = format!("Policy validation failed:\n{}", errors.join("\n"));
            Err(StringoError::InvalidConfig(full_error_message))
        } else {
            Ok(())
        }
    }

    pub fn find_policy(&self, name: &str) -> Result<&CheckPolicy, StringoError> {
        self.policies
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StringoError::PolicyNotFound(name.to_string()))
    }

    pub fn find_recipe(&self, name: &str) -> Result<&TransformRecipe, StringoError> {
        self.recipes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| StringoError::RecipeNotFound(name.to_string()))
    }
}

fn check_name<'a>(kind: &str, name: &'a str, seen: &mut HashSet<&'a str>, errors: &mut Vec<String>) {
    if name.is_empty() {
        errors.push(format!("A {} has an empty `name` field.", kind));
    } else if name.chars().count() > MAX_POLICY_NAME_LENGTH {
        errors.push(format!(
            "The {} name '{}' exceeds {} characters.",
            kind, name, MAX_POLICY_NAME_LENGTH
        ));
    } else if !seen.insert(name) {
        errors.push(format!("Duplicate {} name found: '{}'.", kind, name));
    }
}

/// Merges user-defined policies and recipes with defaults. User entries replace
/// defaults of the same name. The result is sorted by name.
pub fn merge_configs(default_config: StringoConfig, user_config: Option<StringoConfig>) -> StringoConfig {
    debug!(
        "merge_configs called. Initial default policies: {}, recipes: {}",
        default_config.policies.len(),
        default_config.recipes.len()
    );

    let mut policies: HashMap<String, CheckPolicy> = default_config
        .policies
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();
    let mut recipes: HashMap<String, TransformRecipe> = default_config
        .recipes
        .into_iter()
        .map(|r| (r.name.clone(), r))
        .collect();

    if let Some(user_cfg) = user_config {
        debug!(
            "User config provided. Merging {} user policies and {} user recipes.",
            user_cfg.policies.len(),
            user_cfg.recipes.len()
        );
        for policy in user_cfg.policies {
            policies.insert(policy.name.clone(), policy);
        }
        for recipe in user_cfg.recipes {
            recipes.insert(recipe.name.clone(), recipe);
        }
    }

    let mut policies: Vec<CheckPolicy> = policies.into_values().collect();
    policies.sort_by(|a, b| a.name.cmp(&b.name));
    let mut recipes: Vec<TransformRecipe> = recipes.into_values().collect();
    recipes.sort_by(|a, b| a.name.cmp(&b.name));

    debug!("Final totals after merge: {} policies, {} recipes.", policies.len(), recipes.len());
    StringoConfig { policies, recipes }
}
