// SPDX-License-Identifier: MPL-2.0
//! Read-only provider of audience and history reference data.

use crate::domain::notification::{
    NotificationStat, RecentNotification, TargetGroup, TargetGroupId,
};

/// Source of the target groups, dashboard statistics and send history the
/// composer displays. Implementations never change while the screen is open.
pub trait AudienceDirectory {
    /// Target groups in display order.
    fn target_groups(&self) -> &[TargetGroup];

    /// Headline statistics.
    fn stats(&self) -> &[NotificationStat];

    /// Previously sent notifications, newest first.
    fn recent_notifications(&self) -> &[RecentNotification];

    /// Looks up a target group by identifier.
    fn find_group(&self, id: &TargetGroupId) -> Option<&TargetGroup> {
        self.target_groups().iter().find(|group| &group.id == id)
    }
}
