//! Sample content shown in the mockup

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard<'a> {
    pub icon: &'a str,
    pub value: &'a str,
    pub label: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction<'a> {
    pub day: u8,
    pub month: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    /// Bare number; the currency prefix is added when the row is drawn
    pub amount: &'a str,
}

pub const CURRENCY_PREFIX: &str = "$";

impl Transaction<'_> {
    pub fn amount_label(&self) -> String {
        format!("{}{}", CURRENCY_PREFIX, self.amount)
    }
}

pub const TITLE: &str = "Expenses";
pub const SECTION_LABEL: &str = "Recent Transactions";

pub const STAT_CARDS: [StatCard<'static>; 4] = [
    StatCard { icon: "💰", value: "1,234", label: "Total" },
    StatCard { icon: "📊", value: "456", label: "Monthly" },
    StatCard { icon: "📈", value: "789", label: "Average" },
    StatCard { icon: "💵", value: "321", label: "Savings" },
];

pub const TRANSACTIONS: [Transaction<'static>; 5] = [
    Transaction { day: 15, month: "DEC", category: "Food", description: "Grocery Shopping", amount: "45.50" },
    Transaction { day: 14, month: "DEC", category: "Transport", description: "Uber Ride", amount: "12.30" },
    Transaction { day: 13, month: "DEC", category: "Entertainment", description: "Movie Tickets", amount: "25.00" },
    Transaction { day: 12, month: "DEC", category: "Food", description: "Restaurant", amount: "67.80" },
    Transaction { day: 11, month: "DEC", category: "Shopping", description: "Clothing Store", amount: "89.99" },
];

/// First entry is the active tab
pub const NAV_ICONS: [&str; 5] = ["🏠", "📊", "💰", "💳", "👤"];
