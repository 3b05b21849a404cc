//! # Product Store
//!
//! State management for a product catalog screen, built as a unidirectional
//! data flow:
//!
//! ```text
//! View ──dispatch──→ Store ──reduce──→ AppState ──select──→ View
//!                      │                   ↑
//!                      └──→ Effects ──→ Transport ──→ outcome action
//! ```
//!
//! - **Actions** - the closed vocabulary of intents and backend outcomes → [`actions`]
//! - **Reducers** - pure `(state, action) -> state` transitions → [`reducer`]
//! - **Selectors** - derived, memoizable reads of the state tree → [`selectors`]
//! - **Store** - single writer fed by one ordered queue → [`store`]
//! - **Effects** - request actions to backend calls and back → [`effects`]
//! - **Transport** - the backend contract and an in-memory backend → [`transport`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), product_store::error::StoreError> {
//! use product_store::actions::ProductAction;
//! use product_store::app_system::StoreSystem;
//! use product_store::config::StoreConfig;
//! use product_store::selectors::select_products;
//! use product_store::state::product_feature;
//!
//! let system = StoreSystem::start_in_memory(&StoreConfig::default());
//! let mut products = system.store.select(|s| select_products(product_feature(s)));
//!
//! system.store.dispatch(ProductAction::LoadProducts);
//! products.next().await; // current (empty) list
//! products.next().await; // loaded list
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod actor_framework;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod effects;
pub mod error;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;
pub mod transport;

#[cfg(test)]
mod mock_framework;
