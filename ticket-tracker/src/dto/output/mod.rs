mod ticket_stats;

pub use ticket_stats::*;
