//! Design-variant API endpoints.
//!
//! Reads are public so the frontend can style itself before any sign-in;
//! switching the site-wide direction requires a session.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::theme::{self, ThemeDescriptor, VariantKey, ALL_VARIANTS};
use crate::AppState;

/// Active-variant payload: the key, its full descriptor, and the css custom
/// properties the frontend applies at the document root.
#[derive(Debug, Serialize)]
pub struct ThemeState {
    pub active: VariantKey,
    pub theme: &'static ThemeDescriptor,
    pub css_vars: serde_json::Map<String, serde_json::Value>,
}

impl ThemeState {
    fn current(state: &AppState) -> Self {
        let descriptor = state.theme.active_theme();
        let css_vars = theme::css_vars(descriptor)
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
            .collect();

        Self {
            active: descriptor.key,
            theme: descriptor,
            css_vars,
        }
    }
}

/// Request body for switching the active variant.
#[derive(Debug, Deserialize)]
pub struct SetVariantRequest {
    pub variant: String,
}

/// GET /api/theme - The active variant with its resolved tokens.
pub async fn get_theme(State(state): State<AppState>) -> ApiResult<ThemeState> {
    success(ThemeState::current(&state))
}

/// GET /api/theme/variants - All variant descriptors, in key order.
pub async fn list_variants(
    State(_state): State<AppState>,
) -> ApiResult<Vec<&'static ThemeDescriptor>> {
    success(ALL_VARIANTS.iter().map(|k| theme::resolve(*k)).collect())
}

/// PUT /api/theme - Switch the active variant.
pub async fn set_theme(
    State(state): State<AppState>,
    Json(request): Json<SetVariantRequest>,
) -> ApiResult<ThemeState> {
    let Some(key) = VariantKey::from_str(&request.variant) else {
        return Err(AppError::Validation {
            message: format!("Unknown variant key: {}", request.variant),
            fields: vec!["variant".to_string()],
        });
    };

    if state.theme.set(key) {
        tracing::info!(variant = key.as_str(), "Switched active design variant");
    }

    success(ThemeState::current(&state))
}
