//! SeaORM adapters: the only layer that touches entities directly.

pub mod accounts_sea;
