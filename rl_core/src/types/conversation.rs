use crate::types::message::Message;

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Conversation {
            messages: Vec::new(),
        }
    }

    pub fn from_message(message: Message) -> Self {
        Conversation {
            messages: vec![message],
        }
    }

    pub fn from_vec(messages: Vec<Message>) -> Self {
        Conversation { messages }
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.clone()
    }
}
