use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fxhash::FxHashMap;
use folio_domain::config::SiteConfig;
use folio_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[folio_derive::folio_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for SiteStateError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Application state is incomplete");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[derive(Debug)]
pub struct SiteStateInner {
    pub config: SiteConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Application state handed to every handler. Immutable after [`SiteStateBuilder::build`].
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, SiteStateError> {
        self.get_slice::<T>().ok_or_else(|| SiteStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Registered slice names (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// # Errors
    /// [`SiteStateError::Validation`] when no config was provided.
    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let config = self.config.ok_or_else(|| SiteStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        Ok(SiteState { inner: Arc::new(SiteStateInner { config, slices: self.slices }) })
    }
}
