//! Shop catalogs, purchases, consumables and the stock market desk.

pub mod catalog;
pub mod consumables;
pub mod purchase;
pub mod trading;

pub use consumables::use_consumable;
pub use purchase::{
    auto_buy_hardware, buy_consumable, buy_hardware, buy_software, restock, upgrade_vault,
};
pub use trading::{buy_shares, sell_shares, share_cap};
