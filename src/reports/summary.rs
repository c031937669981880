//! Financial summary
//!
//! Totals income and expenses across the whole ledger and derives profit
//! and the expense-to-income ratio.

use serde::{Deserialize, Serialize};

use crate::models::Ledger;

/// Aggregate figures for a ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of all income amounts
    pub total_income: f64,
    /// Sum of all expense amounts
    pub total_expense: f64,
    /// Income minus expenses
    pub profit: f64,
    /// Expenses as a percentage of income; absent when there is no income
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_ratio: Option<f64>,
}

impl FinancialSummary {
    /// Compute the summary for a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let (total_income, total_expense) =
            ledger.iter().fold((0.0, 0.0), |(income, expense), txn| {
                if txn.is_income() {
                    (income + txn.amount, expense)
                } else {
                    (income, expense + txn.amount)
                }
            });

        let expense_ratio = (total_income > 0.0).then(|| total_expense / total_income * 100.0);

        Self {
            total_income,
            total_expense,
            profit: total_income - total_expense,
            expense_ratio,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("\nFinancial Summary\n");
        output.push_str("----------------\n");
        output.push_str(&format!(
            "Total Income:  {}\n",
            format_money(self.total_income, currency)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            format_money(self.total_expense, currency)
        ));
        output.push_str(&format!(
            "Net Profit:    {}\n",
            format_money(self.profit, currency)
        ));

        if let Some(ratio) = self.expense_ratio {
            output.push_str(&format!("Expense to Income Ratio: {:.2}%\n", ratio));
        }

        output
    }
}

/// Currency-prefixed amount with two decimals
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}
