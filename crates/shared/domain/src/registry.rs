//! Type-erased registry entries for feature slices.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// State owned by a feature slice and shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Upcast used for downcasting back to the concrete slice.
    fn as_any(&self) -> &dyn Any;
}

/// A slice ready to be registered in the application state.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), state: Box::new(state) }
    }
}
