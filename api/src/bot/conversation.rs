/// How far along a chat is in the intake conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConversationStep {
	/// No conversation has been started
	#[default]
	Idle,
	AwaitingName,
	AwaitingEmail,
	AwaitingPhone,
	/// The offerings were listed, waiting for the user to pick one
	AwaitingSelection,
}

/// The state of the intake conversation with a single chat, along with the
/// details collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
	pub step: ConversationStep,
	pub full_name: Option<String>,
	pub email: Option<String>,
	pub phone: Option<String>,
}

/// What the bot answers to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
	/// The text to send back to the chat
	pub text: String,
	/// Whether the conversation is over and its state can be dropped
	pub finished: bool,
}

impl Reply {
	fn carry_on(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			finished: false,
		}
	}

	fn finish(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			finished: true,
		}
	}
}

pub const START_COMMAND: &str = "/start";
pub const MENU_COMMAND: &str = "menu";

pub const WELCOME_TEXT: &str = "Welcome to Sophor Bot 👋\nLet's get started. What's your full name?";
pub const ASK_PHONE_TEXT: &str = "Great! Now, what's your phone number?";
pub const OFFERINGS_TEXT: &str = "Awesome! Here's what we can do for you:\n\n\
	💻 Software Development: Website, Web App, Mobile App\n\
	💼 IT Consulting\n\
	📚 Digital Training & AI Training\n\
	🤖 Prompt Engineering\n\n\
	And our ready-made products:\n\
	🛒 B2C eCommerce\n\
	🏫 School Management\n\
	🏢 Property Management\n\
	🏥 Digital Clinic\n\n\
	Reply with the service or product you're interested in, or type 'menu' to see this list again.";
pub const MENU_TEXT: &str = "Here's what we offer:\n\n\
	💻 Software Development: Website, Web App, Mobile App\n\
	💼 IT Consulting\n\
	📚 Digital Training & AI Training\n\
	🤖 Prompt Engineering\n\n\
	Our products:\n\
	🛒 B2C eCommerce\n\
	🏫 School Management\n\
	🏢 Property Management\n\
	🏥 Digital Clinic";
pub const UNKNOWN_TEXT: &str = "Sorry, I didn't understand that. Type /start to begin.";
pub const APOLOGY_TEXT: &str = "Oops! Something went wrong 🤖. Please try again later.";

impl Conversation {
	/// Advances the conversation with the text of an incoming message, and
	/// returns what the bot should answer
	pub fn handle(&mut self, text: &str) -> Reply {
		let text = text.trim();

		if text == START_COMMAND {
			*self = Self {
				step: ConversationStep::AwaitingName,
				..Default::default()
			};
			return Reply::carry_on(WELCOME_TEXT);
		}

		match self.step {
			ConversationStep::Idle => Reply::finish(UNKNOWN_TEXT),
			ConversationStep::AwaitingName => {
				self.full_name = Some(text.to_string());
				self.step = ConversationStep::AwaitingEmail;
				Reply::carry_on(format!(
					"Thanks, {text}! Please provide your email address."
				))
			}
			ConversationStep::AwaitingEmail => {
				self.email = Some(text.to_string());
				self.step = ConversationStep::AwaitingPhone;
				Reply::carry_on(ASK_PHONE_TEXT)
			}
			ConversationStep::AwaitingPhone => {
				self.phone = Some(text.to_string());
				self.step = ConversationStep::AwaitingSelection;
				Reply::carry_on(OFFERINGS_TEXT)
			}
			ConversationStep::AwaitingSelection if text.eq_ignore_ascii_case(MENU_COMMAND) => {
				Reply::carry_on(MENU_TEXT)
			}
			ConversationStep::AwaitingSelection => {
				*self = Self::default();
				Reply::finish(format!(
					"Thanks for your interest in \"{text}\"! Our team will contact you soon."
				))
			}
		}
	}
}
