//! UI Components

pub mod chat_input;
pub mod clock;
pub mod connect_button;
pub mod icons;
pub mod logo;
pub mod message_list;
pub mod node_status;
pub mod side_panels;

pub use chat_input::ChatInput;
pub use clock::ClockDisplay;
pub use connect_button::ConnectWalletButton;
pub use icons::{ArrowRightIcon, ChevronLeftIcon, UserIcon};
pub use logo::Logo;
pub use message_list::MessageList;
pub use node_status::{NodeStatus, StatusLine};
pub use side_panels::{NetworkPanel, RecentActivityPanel, WalletStatusPanel};
