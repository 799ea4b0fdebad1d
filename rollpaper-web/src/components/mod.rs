pub mod board_toolbar;
pub mod button;
pub mod club_card;
pub mod club_title;
pub mod header;
pub mod modal;
pub mod note_card;
pub mod pagination;
pub mod share_dialog;
