//! Built-in sample records for each screen.
//!
//! Timestamps are fixed so orderings are reproducible.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    AnswerOption, CannedResponse, Difficulty, Folder, Message, Question, QuestionKind,
    QuestionStatus,
};

fn ts(month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn inbox(
    id: &str,
    sender: &str,
    subject: &str,
    preview: &str,
    tags: &[&str],
    is_read: bool,
    pinned: bool,
    sent_at: DateTime<Utc>,
) -> Message {
    let mut message = Message::received(id, sender, subject, preview, sent_at);
    message.recipients = strings(&["support@inboxkit.dev"]);
    message.tags = strings(tags);
    message.is_read = is_read;
    message.pinned = pinned;
    message
}

fn sent(
    id: &str,
    to: &[&str],
    subject: &str,
    preview: &str,
    pinned: bool,
    sent_at: DateTime<Utc>,
) -> Message {
    let mut message = Message::received(id, "support@inboxkit.dev", subject, preview, sent_at);
    message.folder = Folder::Sent;
    message.recipients = strings(to);
    message.is_read = true;
    message.pinned = pinned;
    message
}

fn canned(
    id: &str,
    title: &str,
    body: &str,
    category: &str,
    tags: &[&str],
    pinned: bool,
    updated_at: DateTime<Utc>,
) -> CannedResponse {
    CannedResponse {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        category: category.to_string(),
        tags: strings(tags),
        pinned,
        updated_at,
    }
}

pub fn inbox_messages() -> Vec<Message> {
    vec![
        inbox(
            "1",
            "John Kennedy",
            "Invoice #1042 overdue",
            "Hi, the invoice from March is still open",
            &["billing"],
            false,
            false,
            ts(3, 28, 9, 15),
        ),
        inbox(
            "2",
            "Maria Lopez",
            "Team offsite agenda",
            "Attached is the draft agenda for next week",
            &["team"],
            true,
            true,
            ts(3, 25, 16, 40),
        ),
        inbox(
            "3",
            "Priya Natarajan",
            "Login issue on mobile",
            "After the update I can't sign in on Android",
            &["bug", "mobile"],
            false,
            false,
            ts(3, 28, 11, 2),
        ),
        inbox(
            "4",
            "Tom Becker",
            "Re: Contract renewal",
            "Legal signed off, we can send it Monday",
            &["sales"],
            true,
            false,
            ts(3, 22, 8, 0),
        ),
        inbox(
            "5",
            "Ellen Kennedy",
            "Feature request: dark mode",
            "Our night shift would love a dark theme",
            &["feedback"],
            false,
            false,
            ts(3, 27, 21, 30),
        ),
        inbox(
            "6",
            "Support Bot",
            "Weekly ticket summary",
            "142 tickets closed, median response 2h",
            &["report"],
            true,
            true,
            ts(3, 25, 7, 0),
        ),
        inbox(
            "7",
            "Chen Wei",
            "Refund request for order 5531",
            "The package arrived damaged",
            &["billing", "refund"],
            false,
            false,
            ts(3, 26, 13, 45),
        ),
        inbox(
            "8",
            "Aisha Bello",
            "Thanks for the quick help!",
            "Everything works now, appreciate it",
            &[],
            true,
            false,
            ts(3, 20, 10, 10),
        ),
    ]
}

pub fn sent_messages() -> Vec<Message> {
    vec![
        sent(
            "s1",
            &["john.kennedy@example.com"],
            "Re: Invoice #1042 overdue",
            "Thanks John, payment is scheduled",
            false,
            ts(3, 28, 10, 0),
        ),
        sent(
            "s2",
            &["priya@example.com"],
            "Re: Login issue on mobile",
            "Could you try clearing the app cache?",
            true,
            ts(3, 28, 11, 30),
        ),
        sent(
            "s3",
            &["team@inboxkit.dev"],
            "On-call rota for April",
            "Rota attached, swaps by Friday please",
            false,
            ts(3, 24, 15, 5),
        ),
        sent(
            "s4",
            &["chen.wei@example.com"],
            "Re: Refund request for order 5531",
            "Refund issued, expect it in 3-5 days",
            false,
            ts(3, 26, 14, 20),
        ),
    ]
}

pub fn canned_responses() -> Vec<CannedResponse> {
    vec![
        canned(
            "c1",
            "Refund approved",
            "Your refund has been processed and should arrive in 3-5 business days.",
            "Billing",
            &["refund"],
            true,
            ts(2, 10, 9, 0),
        ),
        canned(
            "c2",
            "Password reset steps",
            "Open Settings > Account > Reset password and follow the email link.",
            "Account",
            &["login"],
            false,
            ts(3, 1, 12, 0),
        ),
        canned(
            "c3",
            "Clear app cache",
            "Please clear the app cache and restart; this fixes most sync issues.",
            "Technical",
            &["mobile"],
            false,
            ts(3, 15, 17, 30),
        ),
        canned(
            "c4",
            "Feature request received",
            "Thanks for the idea! We've logged it with the product team.",
            "Feedback",
            &[],
            false,
            ts(1, 20, 8, 45),
        ),
        canned(
            "c5",
            "Escalated to engineering",
            "We've escalated this to our engineers and will update you within 24h.",
            "Technical",
            &["escalation"],
            true,
            ts(3, 18, 10, 15),
        ),
    ]
}

pub fn questions() -> Vec<Question> {
    let option = |id: &str, text: &str, is_correct: bool| AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        is_correct,
    };
    vec![
        Question {
            id: "q1".to_string(),
            prompt: "Which HTTP status code means 'Not Found'?".to_string(),
            kind: QuestionKind::MultipleChoice,
            status: QuestionStatus::Published,
            difficulty: Difficulty::Easy,
            tags: strings(&["http", "web"]),
            options: vec![
                option("a", "200", false),
                option("b", "404", true),
                option("c", "500", false),
            ],
            pinned: true,
            created_at: ts(1, 5, 9, 0),
        },
        Question {
            id: "q2".to_string(),
            prompt: "TCP guarantees in-order delivery.".to_string(),
            kind: QuestionKind::TrueFalse,
            status: QuestionStatus::Published,
            difficulty: Difficulty::Medium,
            tags: strings(&["networking"]),
            options: vec![option("t", "True", true), option("f", "False", false)],
            pinned: false,
            created_at: ts(1, 12, 14, 30),
        },
        Question {
            id: "q3".to_string(),
            prompt: "Name the command that shows the current git branch.".to_string(),
            kind: QuestionKind::ShortAnswer,
            status: QuestionStatus::Draft,
            difficulty: Difficulty::Easy,
            tags: strings(&["git"]),
            options: Vec::new(),
            pinned: false,
            created_at: ts(2, 2, 11, 0),
        },
        Question {
            id: "q4".to_string(),
            prompt: "Explain the difference between a process and a thread.".to_string(),
            kind: QuestionKind::Essay,
            status: QuestionStatus::Published,
            difficulty: Difficulty::Hard,
            tags: strings(&["os", "concurrency"]),
            options: Vec::new(),
            pinned: false,
            created_at: ts(2, 20, 16, 0),
        },
        Question {
            id: "q5".to_string(),
            prompt: "Which data structure gives O(1) average lookup by key?".to_string(),
            kind: QuestionKind::MultipleChoice,
            status: QuestionStatus::Archived,
            difficulty: Difficulty::Medium,
            tags: strings(&["algorithms"]),
            options: vec![
                option("a", "Linked list", false),
                option("b", "Hash map", true),
                option("c", "Binary heap", false),
            ],
            pinned: false,
            created_at: ts(1, 28, 10, 0),
        },
        Question {
            id: "q6".to_string(),
            prompt: "DNS resolves domain names to IP addresses.".to_string(),
            kind: QuestionKind::TrueFalse,
            status: QuestionStatus::Draft,
            difficulty: Difficulty::Easy,
            tags: strings(&["networking", "web"]),
            options: vec![option("t", "True", true), option("f", "False", false)],
            pinned: true,
            created_at: ts(3, 3, 8, 20),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::record::Record;

    fn unique_ids<R: Record>(records: &[R]) -> bool {
        let ids: HashSet<&str> = records.iter().map(|r| r.id()).collect();
        ids.len() == records.len()
    }

    #[test]
    fn test_mock_ids_are_unique() {
        assert!(unique_ids(&inbox_messages()));
        assert!(unique_ids(&sent_messages()));
        assert!(unique_ids(&canned_responses()));
        assert!(unique_ids(&questions()));
    }

    #[test]
    fn test_mock_questions_are_valid() {
        for question in questions() {
            assert!(question.validate().is_ok(), "{} failed validation", question.id);
        }
    }

    #[test]
    fn test_sent_messages_are_in_sent_folder() {
        assert!(sent_messages().iter().all(|m| m.folder == Folder::Sent));
        assert!(inbox_messages().iter().all(|m| m.folder == Folder::Inbox));
    }
}
