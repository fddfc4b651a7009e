//! Types exchanged with the routing service.
//!
//! The router itself is an external collaborator. This module only describes what we ask
//! it (`TradeRequest`) and what it hands back (`TradeResult`).

mod types;

pub use types::*;

use std::sync::Arc;

/// Source of routed trade quotes.
///
/// Implementations return the latest known result for a request without blocking; polling,
/// retries and timeouts all live behind this trait.
pub trait RoutingApi {
    fn routing_api_trade(&self, request: &TradeRequest) -> TradeResult;
}

impl<T: RoutingApi + ?Sized> RoutingApi for Arc<T> {
    fn routing_api_trade(&self, request: &TradeRequest) -> TradeResult {
        (**self).routing_api_trade(request)
    }
}

impl<T: RoutingApi + ?Sized> RoutingApi for &T {
    fn routing_api_trade(&self, request: &TradeRequest) -> TradeResult {
        (**self).routing_api_trade(request)
    }
}
