//! Cart Repositories

mod carts;
mod items;

pub(crate) use carts::MemoryCartsRepository;
pub(crate) use items::MemoryCartItemsRepository;
