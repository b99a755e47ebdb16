// src/strategy/mod.rs

// 1. Declare the child modules (the actual files in this folder)
pub mod pooled;
pub mod unpooled;

// 2. Re-export the structs for cleaner imports
// This allows 'use absig::strategy::PooledZ'
pub use pooled::PooledZ;
pub use unpooled::UnpooledZ;

use crate::models::ZMethod;
use crate::traits::ZScoreStrategy;

static POOLED: PooledZ = PooledZ;
static UNPOOLED: UnpooledZ = UnpooledZ;

impl ZMethod {
    /// Resolves the estimator behind this method.
    pub fn strategy(self) -> &'static dyn ZScoreStrategy {
        match self {
            ZMethod::Pooled => &POOLED,
            ZMethod::Unpooled => &UNPOOLED,
        }
    }
}
