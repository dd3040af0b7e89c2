// SPDX-License-Identifier: MPL-2.0
//! Delivery channels and the per-notification channel selection.

use std::fmt;
use std::str::FromStr;

/// One delivery medium a notification can be sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Push,
    Email,
    Sms,
    WhatsApp,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 4] = [Channel::Push, Channel::Email, Channel::Sms, Channel::WhatsApp];

    /// Returns the stable identifier used in logs and directory files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Push => "push",
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::WhatsApp => "whatsapp",
        }
    }

    /// Returns the i18n key for the channel's display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Channel::Push => "channel-push",
            Channel::Email => "channel-email",
            Channel::Sms => "channel-sms",
            Channel::WhatsApp => "channel-whatsapp",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a channel name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown delivery channel: {}", self.0)
    }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
    type Err = UnknownChannel;

    /// Parses a channel name case-insensitively ("SMS", "WhatsApp", "push"...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "push" => Ok(Channel::Push),
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            "whatsapp" => Ok(Channel::WhatsApp),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// Independent on/off switches for every delivery channel.
///
/// Nothing requires at least one channel to be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
    pub whatsapp: bool,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            push: true,
            email: true,
            sms: false,
            whatsapp: false,
        }
    }
}

impl Channels {
    /// Every channel switched off.
    #[must_use]
    pub fn none() -> Self {
        Self {
            push: false,
            email: false,
            sms: false,
            whatsapp: false,
        }
    }

    /// Returns whether the given channel is enabled.
    #[must_use]
    pub fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Push => self.push,
            Channel::Email => self.email,
            Channel::Sms => self.sms,
            Channel::WhatsApp => self.whatsapp,
        }
    }

    /// Returns a copy with exactly one channel flag replaced.
    #[must_use]
    pub fn with(mut self, channel: Channel, enabled: bool) -> Self {
        match channel {
            Channel::Push => self.push = enabled,
            Channel::Email => self.email = enabled,
            Channel::Sms => self.sms = enabled,
            Channel::WhatsApp => self.whatsapp = enabled,
        }
        self
    }

    /// Iterates over the enabled channels in display order.
    pub fn enabled(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL
            .into_iter()
            .filter(move |channel| self.is_enabled(*channel))
    }
}
