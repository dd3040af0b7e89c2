// SPDX-License-Identifier: MPL-2.0
//! Audience directory backed by in-memory data.
//!
//! The built-in data set mirrors the dashboard's demo content. A deployment
//! can replace it with a TOML file:
//!
//! ```toml
//! [[target_groups]]
//! id = "all-users"
//! label = "All Users"
//! member_count = 45290
//!
//! [[stats]]
//! label = "Delivery Rate"
//! value = "98.2%"
//! change = "+1.5% improvement"
//! trend = "positive"
//!
//! [[recent]]
//! id = 1
//! title = "Fee Payment Reminder"
//! message = "Your fee payment is due in 3 days"
//! sent_to = "All Students"
//! channels = ["Email", "Push"]
//! sent = 45290
//! delivered = 44982
//! timestamp = "2024-01-16 14:30"
//! ```

use crate::application::port::AudienceDirectory;
use crate::domain::notification::{
    Channel, NotificationStat, RecentNotification, TargetGroup, Trend,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Read-only directory holding its data in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDirectory {
    target_groups: Vec<TargetGroup>,
    stats: Vec<NotificationStat>,
    recent: Vec<RecentNotification>,
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaticDirectory {
    /// Creates a directory from explicit data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Directory`] when `target_groups` is empty: the
    /// composer always needs at least one audience to address.
    pub fn new(
        target_groups: Vec<TargetGroup>,
        stats: Vec<NotificationStat>,
        recent: Vec<RecentNotification>,
    ) -> Result<Self> {
        if target_groups.is_empty() {
            return Err(Error::Directory("no target groups defined".into()));
        }
        Ok(Self {
            target_groups,
            stats,
            recent,
        })
    }

    /// The demo data set shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let target_groups = vec![
            TargetGroup::new("all-users", "All Users", 45_290),
            TargetGroup::new("active-users", "Active Users", 42_156),
            TargetGroup::new("inactive-users", "Inactive Users", 3_134),
            TargetGroup::new("vendors", "All Vendors", 134),
            TargetGroup::new("franchises", "All Franchises", 56),
            TargetGroup::new("pending-kyc", "Pending KYC", 89),
            TargetGroup::new("new-users", "New Users (Last 30 days)", 1_245),
        ];

        let stat = |label: &str, value: &str, change: &str, trend| NotificationStat {
            label: label.into(),
            value: value.into(),
            change: change.into(),
            trend,
        };
        let stats = vec![
            stat("Notifications Sent", "12.5K", "+15% this month", Trend::Positive),
            stat("Delivery Rate", "98.2%", "+1.5% improvement", Trend::Positive),
            stat("Engagement", "42.7%", "+5.3% this month", Trend::Positive),
            stat("Push Enabled", "38.9K", "85.9% of users", Trend::Neutral),
        ];

        let recent = vec![
            RecentNotification {
                id: 1,
                title: "Fee Payment Reminder".into(),
                message: "Your fee payment is due in 3 days".into(),
                sent_to: "All Students".into(),
                channels: vec![Channel::Email, Channel::Push],
                sent: 45_290,
                delivered: 44_982,
                timestamp: "2024-01-16 14:30".into(),
            },
            RecentNotification {
                id: 2,
                title: "New Course Available".into(),
                message: "Check out our new Data Science course".into(),
                sent_to: "Active Users".into(),
                channels: vec![Channel::Email, Channel::Push, Channel::Sms],
                sent: 42_156,
                delivered: 41_890,
                timestamp: "2024-01-16 10:45".into(),
            },
            RecentNotification {
                id: 3,
                title: "KYC Reminder".into(),
                message: "Complete your KYC verification".into(),
                sent_to: "Pending KYC".into(),
                channels: vec![Channel::Sms, Channel::WhatsApp],
                sent: 890,
                delivered: 876,
                timestamp: "2024-01-15 09:15".into(),
            },
        ];

        Self {
            target_groups,
            stats,
            recent,
        }
    }

    /// Parses a directory from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML and [`Error::Directory`]
    /// for unknown channel names or an empty target group list.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DirectoryFile = toml::from_str(content)?;
        file.into_directory()
    }

    /// Loads a directory from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not describe a valid directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl AudienceDirectory for StaticDirectory {
    fn target_groups(&self) -> &[TargetGroup] {
        &self.target_groups
    }

    fn stats(&self) -> &[NotificationStat] {
        &self.stats
    }

    fn recent_notifications(&self) -> &[RecentNotification] {
        &self.recent
    }
}

// =============================================================================
// File format
// =============================================================================

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    target_groups: Vec<TargetGroupEntry>,
    #[serde(default)]
    stats: Vec<StatEntry>,
    #[serde(default)]
    recent: Vec<RecentEntry>,
}

#[derive(Debug, Deserialize)]
struct TargetGroupEntry {
    id: String,
    label: String,
    #[serde(default)]
    member_count: u64,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
enum TrendEntry {
    #[default]
    Positive,
    Neutral,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    label: String,
    value: String,
    #[serde(default)]
    change: String,
    #[serde(default)]
    trend: TrendEntry,
}

#[derive(Debug, Deserialize)]
struct RecentEntry {
    id: u32,
    title: String,
    #[serde(default)]
    message: String,
    sent_to: String,
    #[serde(default)]
    channels: Vec<String>,
    #[serde(default)]
    sent: u64,
    #[serde(default)]
    delivered: u64,
    #[serde(default)]
    timestamp: String,
}

impl DirectoryFile {
    fn into_directory(self) -> Result<StaticDirectory> {
        let target_groups = self
            .target_groups
            .into_iter()
            .map(|entry| TargetGroup::new(entry.id, entry.label, entry.member_count))
            .collect();

        let stats = self
            .stats
            .into_iter()
            .map(|entry| NotificationStat {
                label: entry.label,
                value: entry.value,
                change: entry.change,
                trend: match entry.trend {
                    TrendEntry::Positive => Trend::Positive,
                    TrendEntry::Neutral => Trend::Neutral,
                },
            })
            .collect();

        let recent = self
            .recent
            .into_iter()
            .map(|entry| {
                let channels = entry
                    .channels
                    .iter()
                    .map(|name| name.parse::<Channel>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|err| Error::Directory(err.to_string()))?;
                Ok(RecentNotification {
                    id: entry.id,
                    title: entry.title,
                    message: entry.message,
                    sent_to: entry.sent_to,
                    channels,
                    sent: entry.sent,
                    delivered: entry.delivered,
                    timestamp: entry.timestamp,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        StaticDirectory::new(target_groups, stats, recent)
    }
}
