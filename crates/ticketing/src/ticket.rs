use serde::{Deserialize, Serialize};

/// Ticket category. Each category has a fixed unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Every category, in price-table order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Price of one ticket, in whole currency units.
    pub const fn unit_price(self) -> i64 {
        match self {
            TicketCategory::Adult => 20,
            TicketCategory::Child => 10,
            TicketCategory::Infant => 0,
        }
    }

    /// Infants sit on an adult's lap and do not take a seat.
    pub const fn requires_seat(self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            TicketCategory::Adult => 0,
            TicketCategory::Child => 1,
            TicketCategory::Infant => 2,
        }
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Infant => "infant",
        };
        f.write_str(name)
    }
}

/// A caller's request for `count` tickets of one category.
///
/// `count` is taken verbatim from the caller and may be zero or negative;
/// the purchase rules only look at the aggregated totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    pub category: TicketCategory,
    pub count: i32,
}

impl TicketRequest {
    pub const fn new(category: TicketCategory, count: i32) -> Self {
        Self { category, count }
    }

    pub const fn adult(count: i32) -> Self {
        Self::new(TicketCategory::Adult, count)
    }

    pub const fn child(count: i32) -> Self {
        Self::new(TicketCategory::Child, count)
    }

    pub const fn infant(count: i32) -> Self {
        Self::new(TicketCategory::Infant, count)
    }
}
