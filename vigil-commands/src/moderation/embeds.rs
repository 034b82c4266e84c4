use poise::serenity_prelude as serenity;

use vigil_database::model::warnings::WarningRecord;

/// Upper bound for one warning list page (embed descriptions cap at 4096).
pub const WARNLIST_PAGE_CHARS: usize = 3_500;

pub fn permission_denied_message() -> &'static str {
    "⛔ You are not allowed to use this command."
}

pub fn empty_reason_message() -> &'static str {
    "A warning needs a reason."
}

pub fn no_warnings_message() -> &'static str {
    "✅ Nobody has been warned yet."
}

/// Break user mentions in free text so replies never ping anyone.
pub fn sanitize_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

pub fn display_name(user: &serenity::User) -> String {
    user.global_name
        .clone()
        .unwrap_or_else(|| user.name.clone())
}

pub fn warn_issued_message(target_id: u64, reason: &str, warn_id: u64) -> String {
    format!(
        "⚠️ <@{}> has been warned! Reason: **{}** | ID: `{}`",
        target_id,
        sanitize_mentions(reason),
        warn_id
    )
}

pub fn warning_removed_message(warn_id: u64) -> String {
    format!("✅ Warning ID `{}` removed.", warn_id)
}

pub fn warning_not_found_message(warn_id: u64) -> String {
    format!("⚠️ No warning found with ID `{}`.", warn_id)
}

pub fn warnings_cleared_message(target_id: u64, count: usize) -> String {
    format!(
        "✅ Removed all warnings for <@{}>. ({} removed)",
        target_id, count
    )
}

pub fn user_has_no_warnings_message(target_id: u64) -> String {
    format!("ℹ️ <@{}> has no warnings.", target_id)
}

pub fn warn_audit_line(
    target_tag: &str,
    target_id: u64,
    reason: &str,
    moderator_tag: &str,
    warn_id: u64,
) -> String {
    format!(
        "⚠️ **WARN** | {} (ID: {}) received a warning.\nReason: {}\nModerator: {} | Warn ID: `{}`",
        target_tag,
        target_id,
        sanitize_mentions(reason),
        moderator_tag,
        warn_id
    )
}

pub fn clear_one_audit_line(warn_id: u64, moderator_tag: &str) -> String {
    format!(
        "🗑 **CLEAR WARN** | Warning ID `{}` removed.\nModerator: {}",
        warn_id, moderator_tag
    )
}

pub fn clear_all_audit_line(
    target_tag: &str,
    target_id: u64,
    moderator_tag: &str,
    count: usize,
) -> String {
    format!(
        "🗑 **CLEAR ALL WARNS** | {} ({}) had all warnings removed.\nModerator: {} | {} warning(s) removed",
        target_tag, target_id, moderator_tag, count
    )
}

/// One user's block in the warning list: a header and one line per record.
pub fn warnlist_section(user_label: &str, records: &[WarningRecord]) -> String {
    let mut out = format!("**{} – {} warning(s)**", user_label, records.len());

    for record in records {
        out.push_str(&format!(
            "\nID: `{}` – {} *(by {} | {})*",
            record.id,
            sanitize_mentions(&record.reason),
            record.moderator,
            record.date_label()
        ));
    }

    out
}

/// Label a stored user id, preferring the account tag when it can be fetched.
pub async fn resolve_user_label(http: &serenity::Http, user_id: &str) -> String {
    let Some(id) = user_id.parse::<u64>().ok().filter(|id| *id != 0) else {
        return format!("User {}", user_id);
    };

    match http.get_user(serenity::UserId::new(id)).await {
        Ok(user) => format!("{} ({})", user.tag(), id),
        Err(_) => format!("User {}", id),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use vigil_database::model::warnings::WarningRecord;

    use super::{
        clear_all_audit_line, sanitize_mentions, warn_audit_line, warn_issued_message,
        warnlist_section,
    };

    #[test]
    fn mentions_in_reasons_are_defused() {
        assert_eq!(sanitize_mentions("@everyone"), "@\u{200B}everyone");
        assert!(!warn_issued_message(1, "@here spam", 3).contains("@here"));
    }

    #[test]
    fn warn_reply_carries_id_and_reason() {
        let reply = warn_issued_message(42, "spam", 7);
        assert!(reply.contains("<@42>"));
        assert!(reply.contains("**spam**"));
        assert!(reply.contains("`7`"));
    }

    #[test]
    fn audit_lines_name_moderator() {
        let line = warn_audit_line("target", 42, "spam", "mod#0001", 9);
        assert!(line.contains("Moderator: mod#0001"));
        assert!(line.contains("Warn ID: `9`"));

        let line = clear_all_audit_line("target", 42, "mod#0001", 3);
        assert!(line.contains("3 warning(s) removed"));
    }

    #[test]
    fn warnlist_section_lists_every_record() {
        let records = vec![
            WarningRecord {
                id: 1,
                reason: "spam".to_owned(),
                moderator: "mod1".to_owned(),
                date: NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|day| day.and_hms_opt(3, 4, 5)),
            },
            WarningRecord {
                id: 4,
                reason: "flood".to_owned(),
                moderator: "mod2".to_owned(),
                date: None,
            },
        ];

        assert_eq!(
            warnlist_section("User 42", &records),
            "**User 42 – 2 warning(s)**\n\
             ID: `1` – spam *(by mod1 | 2024-01-02 03:04:05)*\n\
             ID: `4` – flood *(by mod2 | no date)*"
        );
    }
}
