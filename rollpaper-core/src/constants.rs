//! Fixed layout numbers, storage names and user-facing copy.
//!
//! The board geometry and the Korean strings shown to users live here so the
//! web layer and the tester agree on the exact same values.

// Board grid -----------------------------------------------------------------
pub const GRID_COLUMNS: usize = 2;
pub const GRID_COLUMN_WIDTH: i32 = 170;
pub const GRID_ROW_HEIGHT: i32 = 180;
pub const GRID_OFFSET_X: i32 = 40;
pub const GRID_OFFSET_Y: i32 = 20;

/// Pointer travel (per axis, exclusive) that turns a press into a drag.
pub const DRAG_THRESHOLD_PX: i32 = 5;

// Club list ------------------------------------------------------------------
pub const CLUBS_PER_PAGE: usize = 6;

// Storage --------------------------------------------------------------------
pub const STORAGE_BUCKET: &str = "DeepeningProject";
pub const THUMBNAIL_EXTENSION: &str = "jpg";
pub const DEFAULT_CLUB_IMAGE_URL: &str =
    "https://saayznmhcfprtrehndli.supabase.co/storage/v1/object/public/DeepeningProject/DefaultCardImage.png";
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://saayznmhcfprtrehndli.supabase.co/storage/v1/object/public/DeepeningProject/DefaultProfile.png";

// Tables ---------------------------------------------------------------------
pub const TABLE_CLUBS: &str = "Clubs";
pub const TABLE_USERS: &str = "Users";

/// PostgREST error code for a `.single()` read that matched zero rows.
pub const NO_ROWS_CODE: &str = "PGRST116";

// Copy -----------------------------------------------------------------------
pub const MSG_NOTICE_TITLE: &str = "알림";
pub const MSG_SHARE_TITLE: &str = "공유하기";
pub const MSG_CLUB_TITLE_REQUIRED: &str = "모임명을 입력 해주세요.";
pub const MSG_CLUB_CREATED: &str = "모임이 성공적으로 등록되었습니다.";
pub const MSG_CLUB_CREATE_FAILED: &str = "모임 등록에 실패하였습니다.";
pub const MSG_GUEST_FETCH_FAILED: &str = "데이터를 불러올 수 없습니다";
pub const MSG_CLUB_DATA_MISSING: &str = "클럽 데이터를 불러올 수 없습니다";
pub const MSG_ERROR_PREFIX: &str = "에러가 발생했습니다";
pub const MSG_NICKNAME_REQUIRED: &str = "닉네임을 입력 해주세요.";
pub const MSG_SIGNING_IN: &str = "로그인 중...";
pub const MSG_LOADING: &str = "Loading...";
pub const MSG_BOARD_EMPTY: &str = "아직 작성된 글이 없어요";
pub const MSG_LINK_COPIED: &str = "링크가 복사되었습니다.";
pub const MSG_POST_FAILED: &str = "글 작성에 실패하였습니다.";
pub const MSG_PROFILE_FAILED: &str = "프로필 등록에 실패하였습니다.";
