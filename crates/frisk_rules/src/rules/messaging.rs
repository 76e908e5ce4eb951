//! Messaging platform secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for messaging platform tokens.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "messaging/slack-token",
        category: Category::Messaging,
        name: "Slack Token",
        description: "Bot, user, or app token granting workspace API access.",
        priority: 10,
        regex: r"\b(xox[bpas]-[A-Za-z0-9-]{10,72})\b",
        keywords: &["xoxb-", "xoxp-", "xoxa-", "xoxs-"],
        requires_entropy_check: false,
        env_var: "SLACK_TOKEN",
    },
    crate::rule! {
        id: "messaging/discord-bot-token",
        category: Category::Messaging,
        name: "Discord Bot Token",
        description: "Grants full control of the bot account.",
        priority: 18,
        regex: r"\b([MN][A-Za-z0-9_-]{23,25}\.[A-Za-z0-9_-]{6}\.[A-Za-z0-9_-]{27,38})\b",
        keywords: &[],
        requires_entropy_check: true,
        env_var: "DISCORD_TOKEN",
    },
    crate::rule! {
        id: "messaging/twilio-api-key",
        category: Category::Messaging,
        name: "Twilio API Key",
        description: "Grants access to messaging and voice APIs.",
        priority: 14,
        regex: r"\b(SK[a-f0-9]{32})\b",
        keywords: &["SK"],
        requires_entropy_check: true,
        env_var: "TWILIO_API_KEY",
    },
];
