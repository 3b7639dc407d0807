//! Chat Store
//!
//! Chats and their messages live entirely in memory, seeded from fixture
//! data at startup. Nothing here survives a reload.

/// The canned assistant reply appended after the simulated thinking delay
pub const SCRIPTED_REPLY: &str = "I've received your message. How can I help you further?";

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Message {
    pub id: u32,
    pub content: String,
    pub role: Role,
    /// Inline attachment as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unix millis when the message was appended
    pub timestamp: i64,
}

/// A chat session with its ordered message history
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn next_message_id(&self) -> u32 {
        self.messages.iter().map(|m| m.id).max().map_or(1, |id| id + 1)
    }
}

/// All chats known to the session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatList {
    chats: Vec<Chat>,
}

impl ChatList {
    /// Fixture chats shown before the user starts anything of their own
    pub fn seeded() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            chats: vec![
                Chat {
                    id: "1".to_string(),
                    title: "Coastal survey".to_string(),
                    messages: vec![
                        Message {
                            id: 1,
                            content: "What can you detect in this region?".to_string(),
                            role: Role::User,
                            image: None,
                            timestamp: now,
                        },
                        Message {
                            id: 2,
                            content: "I can flag vessels, vehicles and structures, each with a confidence score."
                                .to_string(),
                            role: Role::Assistant,
                            image: None,
                            timestamp: now,
                        },
                    ],
                },
                Chat {
                    id: "2".to_string(),
                    title: "Convoy review".to_string(),
                    messages: vec![
                        Message {
                            id: 1,
                            content: "Let's go over yesterday's convoy footage.".to_string(),
                            role: Role::User,
                            image: None,
                            timestamp: now,
                        },
                        Message {
                            id: 2,
                            content: "Sure. Which segment would you like to start with?".to_string(),
                            role: Role::Assistant,
                            image: None,
                            timestamp: now,
                        },
                    ],
                },
            ],
        }
    }

    pub fn all(&self) -> &[Chat] {
        &self.chats
    }

    pub fn find(&self, id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// Chats whose title matches the query, case-insensitively.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Chat> {
        let needle = query.trim().to_lowercase();
        self.chats
            .iter()
            .filter(|c| needle.is_empty() || c.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append a message to a chat, returning the new message id.
    /// Returns `None` when the chat does not exist.
    pub fn append_message(
        &mut self,
        chat_id: &str,
        role: Role,
        content: String,
        image: Option<String>,
    ) -> Option<u32> {
        let chat = self.chats.iter_mut().find(|c| c.id == chat_id)?;
        let id = chat.next_message_id();
        chat.messages.push(Message {
            id,
            content,
            role,
            image,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
        Some(id)
    }

    /// Empty a chat's message history, keeping the chat itself
    pub fn clear_messages(&mut self, chat_id: &str) {
        if let Some(chat) = self.chats.iter_mut().find(|c| c.id == chat_id) {
            chat.messages.clear();
        }
    }

    /// Create an empty chat with the next numeric id and return that id
    pub fn create_chat(&mut self, title: String) -> String {
        let id = self
            .chats
            .iter()
            .filter_map(|c| c.id.parse::<u32>().ok())
            .max()
            .map_or(1, |max| max + 1)
            .to_string();
        self.chats.push(Chat {
            id: id.clone(),
            title,
            messages: Vec::new(),
        });
        id
    }
}

/// Derive a chat title from its opening message
pub fn derive_title(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return "New chat".to_string();
    }
    let mut title: String = trimmed.chars().take(32).collect();
    if trimmed.chars().count() > 32 {
        title.push('…');
    }
    title
}

/// Lifecycle of the chat input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    /// Nothing in flight; input is editable
    #[default]
    Idle,
    /// Input has text or an attachment but was not submitted yet
    Composing,
    /// The user message is being appended
    Sending,
    /// The simulated assistant reply has not arrived yet
    AwaitingReply,
}

impl ChatPhase {
    /// Whether the form may accept a submit in this phase. One reply in
    /// flight at a time; the send button also disables off this.
    pub fn accepts_submit(self) -> bool {
        matches!(self, ChatPhase::Idle | ChatPhase::Composing)
    }
}

/// Submit gate for the chat form: requires an editable phase and either
/// non-blank text or an attached image.
pub fn can_submit(phase: ChatPhase, text: &str, has_image: bool) -> bool {
    phase.accepts_submit() && (!text.trim().is_empty() || has_image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chats_have_history() {
        let list = ChatList::seeded();
        assert_eq!(list.all().len(), 2);
        for chat in list.all() {
            assert_eq!(chat.messages.len(), 2);
            assert_eq!(chat.messages[0].role, Role::User);
            assert_eq!(chat.messages[1].role, Role::Assistant);
        }
    }

    #[test]
    fn test_append_preserves_order_and_roles() {
        let mut list = ChatList::seeded();
        let before = list.find("1").map(|c| c.messages.len()).unwrap_or(0);

        list.append_message("1", Role::User, "Scan the north quadrant".to_string(), None);
        list.append_message("1", Role::Assistant, SCRIPTED_REPLY.to_string(), None);

        let chat = list.find("1").expect("chat 1 exists");
        assert_eq!(chat.messages.len(), before + 2);
        let tail = &chat.messages[before..];
        assert_eq!(tail[0].role, Role::User);
        assert_eq!(tail[1].role, Role::Assistant);
        assert_eq!(tail[1].content, SCRIPTED_REPLY);
    }

    #[test]
    fn test_append_keeps_attachment() {
        let mut list = ChatList::seeded();
        let data_url = "data:image/png;base64,AAAA".to_string();

        list.append_message("1", Role::User, String::new(), Some(data_url.clone()));

        let chat = list.find("1").expect("chat 1 exists");
        let last = chat.last_message().expect("message was appended");
        assert_eq!(last.image.as_deref(), Some(data_url.as_str()));
        assert!(last.content.is_empty());
    }

    #[test]
    fn test_message_ids_are_monotonic() {
        let mut list = ChatList::seeded();
        let first = list
            .append_message("2", Role::User, "one".to_string(), None)
            .unwrap();
        let second = list
            .append_message("2", Role::User, "two".to_string(), None)
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_append_to_unknown_chat_is_rejected() {
        let mut list = ChatList::seeded();
        assert_eq!(
            list.append_message("no-such-chat", Role::User, "hello".to_string(), None),
            None
        );
    }

    #[test]
    fn test_clear_messages_keeps_chat() {
        let mut list = ChatList::seeded();
        list.clear_messages("1");
        let chat = list.find("1").expect("chat 1 still listed");
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_search_matches_titles() {
        let list = ChatList::seeded();
        assert_eq!(list.search("convoy").len(), 1);
        assert_eq!(list.search("").len(), 2);
        assert!(list.search("zzz").is_empty());
    }

    #[test]
    fn test_create_chat_assigns_next_numeric_id() {
        let mut list = ChatList::seeded();
        let id = list.create_chat("Ridge sweep".to_string());
        assert_eq!(id, "3");
        assert!(list.find("3").is_some());
        assert!(list.find("3").unwrap().messages.is_empty());

        let next = list.create_chat("Follow-up".to_string());
        assert_eq!(next, "4");
    }

    #[test]
    fn test_derive_title_truncates_long_messages() {
        assert_eq!(derive_title("Scan the ridge"), "Scan the ridge");
        assert_eq!(derive_title("   "), "New chat");

        let long = "Identify every vehicle on the access road north of the depot";
        let title = derive_title(long);
        assert!(title.ends_with('…'));
        assert_eq!(title.chars().count(), 33);
    }

    #[test]
    fn test_empty_submission_never_sends() {
        assert!(!can_submit(ChatPhase::Idle, "", false));
        assert!(!can_submit(ChatPhase::Idle, "   ", false));
        assert!(can_submit(ChatPhase::Idle, "", true));
        assert!(can_submit(ChatPhase::Composing, "status report", false));
    }

    #[test]
    fn test_no_submit_while_reply_outstanding() {
        assert!(!can_submit(ChatPhase::AwaitingReply, "second message", false));
        assert!(!can_submit(ChatPhase::Sending, "second message", true));
    }
}
