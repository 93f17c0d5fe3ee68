pub mod bars;
pub mod clock;
pub mod credo;
pub mod marquee;
pub mod mosaic;
pub mod question;
pub mod ticker;
pub mod title;
pub mod valuation;
