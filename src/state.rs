// This module manages the viewer's state and UI updates
// The State struct holds the platform name being previewed and the logo source

use std::sync::Arc;

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, Theme};
use log::debug;

use crate::badge::{self, BadgeContent};
use crate::config::ViewerConfig;
use crate::logo_provider::LogoProvider;

/// Messages that can be sent to update the viewer state
#[derive(Debug, Clone)]
pub enum Message {
    /// The platform name was edited in the text input
    PlatformChanged(String),
    /// One of the preset platform buttons was pressed
    PresetSelected(String),
}

pub struct State {
    pub platform: String,
    config: ViewerConfig,
    provider: Arc<dyn LogoProvider>,
}

impl State {
    pub fn new(config: ViewerConfig, provider: Arc<dyn LogoProvider>) -> Self {
        Self {
            platform: config.initial_platform.clone(),
            config,
            provider,
        }
    }

    /// What the badge currently shows for the entered platform
    pub fn badge(&self) -> BadgeContent {
        BadgeContent::for_platform(self.provider.as_ref(), &self.platform)
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::PlatformChanged(platform) | Message::PresetSelected(platform) => {
                debug!("Previewing platform {:?}", platform);
                self.platform = platform;
                iced::Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = text_input("Platform name", &self.platform)
            .on_input(Message::PlatformChanged)
            .padding(6)
            .size(14);

        let presets = row(self.config.presets.iter().map(|preset| {
            button(text(preset.clone()).size(13))
                .on_press(Message::PresetSelected(preset.clone()))
                .into()
        }))
        .spacing(6);

        let content = self.badge();
        let caption = match &content {
            BadgeContent::Logo(logo) => {
                format!("Logo: {} ({} bytes)", logo.platform(), logo.bytes().len())
            }
            BadgeContent::Placeholder(_) => "No logo for this platform".to_string(),
        };

        let known = format!("Known platforms: {}", self.provider.platforms().join(", "));

        container(
            column![
                text("DATA PLATFORM").size(13),
                input,
                presets,
                badge::platform_badge(&content, self.config.logo_size),
                text(caption).size(13),
                text(known).size(11),
            ]
            .spacing(10),
        )
        .style(crate::styles::panel)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
