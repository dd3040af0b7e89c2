// SPDX-License-Identifier: MPL-2.0
//! Read-only reference data shown alongside the composer: target groups,
//! headline statistics and previously sent notifications.

use super::channel::Channel;
use super::draft::TargetGroupId;

/// A named audience segment a notification can be addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    pub id: TargetGroupId,
    pub label: String,
    pub member_count: u64,
}

impl TargetGroup {
    pub fn new(id: impl Into<String>, label: impl Into<String>, member_count: u64) -> Self {
        Self {
            id: TargetGroupId::new(id),
            label: label.into(),
            member_count,
        }
    }

    /// Label with the grouped member count, e.g. `All Users (45,290)`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, group_digits(self.member_count))
    }
}

/// Direction of a statistic's change, used to pick its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    #[default]
    Positive,
    Neutral,
}

/// A headline dashboard figure such as the delivery rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// A notification that has already gone out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentNotification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub sent_to: String,
    pub channels: Vec<Channel>,
    pub sent: u64,
    pub delivered: u64,
    pub timestamp: String,
}

impl RecentNotification {
    /// Share of sent messages that were delivered, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn delivery_rate(&self) -> Option<f64> {
        if self.sent == 0 {
            return None;
        }
        Some(self.delivered as f64 * 100.0 / self.sent as f64)
    }
}

/// Formats a count with comma thousands separators (`45290` → `45,290`).
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(56), "56");
        assert_eq!(group_digits(1245), "1,245");
        assert_eq!(group_digits(45290), "45,290");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn display_label_includes_count() {
        let group = TargetGroup::new("all-users", "All Users", 45_290);
        assert_eq!(group.display_label(), "All Users (45,290)");
    }

    #[test]
    fn delivery_rate_handles_zero_sent() {
        let mut record = RecentNotification {
            id: 1,
            title: "KYC Reminder".into(),
            message: "Complete your KYC verification".into(),
            sent_to: "Pending KYC".into(),
            channels: vec![Channel::Sms],
            sent: 0,
            delivered: 0,
            timestamp: "2024-01-15 09:15".into(),
        };
        assert_eq!(record.delivery_rate(), None);

        record.sent = 200;
        record.delivered = 150;
        assert_eq!(record.delivery_rate(), Some(75.0));
    }
}
