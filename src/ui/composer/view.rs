// SPDX-License-Identifier: MPL-2.0
//! Composer screen layout: stats, composition form and recent notifications.

use super::{Message, State, TargetGroupOption};
use crate::application::port::AudienceDirectory;
use crate::domain::notification::{
    group_digits, Channel, NotificationStat, RecentNotification, Trend,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, pick_list, scrollable, text_editor, text_input, toggler, Column, Container, Row, Space, Text,
};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the composer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub directory: &'a dyn AudienceDirectory,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("composer-title")).size(typography::TITLE_LG))
        .push(caption(i18n.tr("composer-subtitle")));

    let body = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(form(state, &ctx)).width(Length::Fixed(sizing::FORM_WIDTH)))
        .push(Container::new(recent_list(&ctx)).width(Length::Fill));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(stats_row(ctx.directory.stats()))
        .push(body);

    scrollable(content).into()
}

fn caption<'a>(content: String) -> Text<'a> {
    Text::new(content)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
}

fn stats_row(stats: &[NotificationStat]) -> Element<'_, Message> {
    stats
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, stat| {
            let accent = styles::container::trend_color(stat.trend == Trend::Positive);
            let tile = Column::new()
                .spacing(spacing::XXS)
                .push(caption(stat.label.clone()))
                .push(Text::new(stat.value.as_str()).size(typography::TITLE_MD))
                .push(
                    Text::new(stat.change.as_str())
                        .size(typography::CAPTION)
                        .style(move |_theme: &Theme| iced::widget::text::Style {
                            color: Some(accent),
                        }),
                );
            row.push(
                card(tile).width(Length::FillPortion(1)).max_width(sizing::STAT_CARD_WIDTH * 2.0),
            )
        })
        .into()
}

fn labeled<'a>(label: String, field: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(field)
}

fn form<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let draft = state.draft();

    let title_input = text_input(&i18n.tr("composer-title-placeholder"), draft.title())
        .on_input(Message::TitleChanged)
        .padding(spacing::XS);

    let message_input = text_editor(&state.message_editor)
        .placeholder(i18n.tr("composer-message-placeholder"))
        .on_action(Message::MessageEdited)
        .padding(spacing::XS)
        .height(sizing::MESSAGE_INPUT_HEIGHT);

    let options: Vec<TargetGroupOption> = ctx
        .directory
        .target_groups()
        .iter()
        .map(TargetGroupOption::from)
        .collect();
    let selected = ctx
        .directory
        .find_group(draft.target_group())
        .map(TargetGroupOption::from);
    let target_picker = pick_list(options, selected, Message::TargetGroupSelected)
        .placeholder(i18n.tr("composer-target-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

    let channels = Channel::ALL.into_iter().fold(
        Row::new().spacing(spacing::MD),
        |row, channel| {
            row.push(
                toggler(draft.channels().is_enabled(channel))
                    .label(i18n.tr(channel.i18n_key()))
                    .on_toggle(move |enabled| Message::ChannelToggled(channel, enabled)),
            )
        },
    );

    let mut scheduling = Column::new().spacing(spacing::XS).push(
        toggler(draft.scheduled())
            .label(i18n.tr("composer-schedule-label"))
            .on_toggle(Message::ScheduledToggled),
    );
    if draft.scheduled() {
        scheduling = scheduling.push(labeled(
            i18n.tr("composer-schedule-date-label"),
            text_input("YYYY-MM-DDTHH:MM", draft.schedule_date_time())
                .on_input(Message::ScheduleDateTimeChanged)
                .padding(spacing::XS),
        ));
    }

    let urgent = toggler(draft.urgent())
        .label(i18n.tr("composer-urgent-label"))
        .on_toggle(Message::UrgentToggled);

    let submit_key = if draft.scheduled() {
        "button-schedule"
    } else {
        "button-send-now"
    };
    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr(submit_key)))
                .on_press(Message::SendPressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("button-preview")))
                .on_press(Message::PreviewPressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        );

    let column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("composer-form-title")).size(typography::TITLE_SM))
        .push(labeled(i18n.tr("composer-title-label"), title_input))
        .push(labeled(i18n.tr("composer-message-label"), message_input))
        .push(labeled(i18n.tr("composer-target-label"), target_picker))
        .push(labeled(i18n.tr("composer-channels-label"), channels))
        .push(scheduling)
        .push(urgent)
        .push(actions);

    card(column).into()
}

fn channel_badge<'a>(i18n: &I18n, channel: Channel) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr(channel.i18n_key())).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(palette::PRIMARY_500))
        .into()
}

fn recent_item<'a>(i18n: &I18n, record: &'a RecentNotification) -> Element<'a, Message> {
    let badges = record
        .channels
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, channel| {
            row.push(channel_badge(i18n, *channel))
        });

    let rate = record
        .delivery_rate()
        .map(|rate| format!("{rate:.1}%"))
        .unwrap_or_else(|| "-".to_string());
    let delivery = i18n.tr_with_args(
        "composer-recent-delivery",
        &[
            ("delivered", &group_digits(record.delivered)),
            ("sent", &group_digits(record.sent)),
            ("rate", &rate),
        ],
    );

    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(record.title.as_str()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(caption(record.timestamp.clone()));

    Column::new()
        .spacing(spacing::XXS)
        .push(heading)
        .push(caption(record.message.clone()))
        .push(caption(i18n.tr_with_args(
            "composer-recent-sent-to",
            &[("group", record.sent_to.as_str())],
        )))
        .push(badges)
        .push(caption(delivery))
        .into()
}

fn recent_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let records = ctx.directory.recent_notifications();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("composer-recent-title")).size(typography::TITLE_SM));

    if records.is_empty() {
        column = column.push(caption(i18n.tr("composer-recent-empty")));
    }
    for record in records {
        column = column.push(recent_item(i18n, record));
    }

    card(column).into()
}
