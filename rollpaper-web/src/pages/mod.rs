pub mod board;
pub mod clubs;
pub mod create_club;
pub mod create_post;
pub mod kakao_redirect;
pub mod login;
pub mod not_found;
pub mod post_detail;
pub mod social_nickname;
