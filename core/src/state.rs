use crate::constants::DEFAULT_CHAIN_ID;
use leptos::prelude::*;
use std::ops::Deref;

/// The chain the user is connected to, if any.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveChain {
    pub chain_id: RwSignal<Option<u64>>,
}

impl ActiveChain {
    pub fn new(chain_id: Option<u64>) -> Self {
        Self {
            chain_id: RwSignal::new(chain_id),
        }
    }
}

impl Default for ActiveChain {
    fn default() -> Self {
        Self {
            chain_id: RwSignal::new(Some(DEFAULT_CHAIN_ID.id())),
        }
    }
}

impl Deref for ActiveChain {
    type Target = RwSignal<Option<u64>>;

    fn deref(&self) -> &Self::Target {
        &self.chain_id
    }
}

impl AsRef<RwSignal<Option<u64>>> for ActiveChain {
    fn as_ref(&self) -> &RwSignal<Option<u64>> {
        &self.chain_id
    }
}
