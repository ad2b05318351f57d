//! Shared application state and per-handler capability extraction.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::domain::repositories::{StoragePinger, UrlDeleter, UrlGetter, UrlSaver};
use crate::utils::alias::AliasGenerator;

/// Router state holding one handle per storage capability.
///
/// Handlers never see this struct: each one extracts the single capability it
/// needs (`State<Arc<dyn UrlGetter>>`, ...) through [`FromRef`].
#[derive(Clone)]
pub struct AppState {
    pub saver: Arc<dyn UrlSaver>,
    pub getter: Arc<dyn UrlGetter>,
    pub deleter: Arc<dyn UrlDeleter>,
    pub pinger: Arc<dyn StoragePinger>,
    pub alias_generator: AliasGenerator,
}

impl AppState {
    /// Builds the state from a storage engine implementing every capability.
    pub fn from_storage<S>(storage: Arc<S>, alias_generator: AliasGenerator) -> Self
    where
        S: UrlSaver + UrlGetter + UrlDeleter + StoragePinger + 'static,
    {
        Self {
            saver: storage.clone(),
            getter: storage.clone(),
            deleter: storage.clone(),
            pinger: storage,
            alias_generator,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UrlSaver> {
    fn from_ref(state: &AppState) -> Self {
        state.saver.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlGetter> {
    fn from_ref(state: &AppState) -> Self {
        state.getter.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlDeleter> {
    fn from_ref(state: &AppState) -> Self {
        state.deleter.clone()
    }
}

impl FromRef<AppState> for Arc<dyn StoragePinger> {
    fn from_ref(state: &AppState) -> Self {
        state.pinger.clone()
    }
}

impl FromRef<AppState> for AliasGenerator {
    fn from_ref(state: &AppState) -> Self {
        state.alias_generator
    }
}
