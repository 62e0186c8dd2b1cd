pub mod button;
pub mod controls;
pub mod flag;
pub mod header;
pub mod legend;
pub mod plate;
pub mod rarity_readout;
pub mod roll_window;
