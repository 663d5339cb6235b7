mod dialogs;
mod kanban_board;
mod project_search;
mod sidebar;
mod status_modal;
mod tab_bar;
mod task_table;
mod work_info_modal;

pub use dialogs::{ConfirmModal, ErrorModal, ErrorState, SuccessModal};
pub use kanban_board::KanbanBoard;
pub use project_search::ProjectSearch;
pub use sidebar::Sidebar;
pub use status_modal::StatusModal;
pub use tab_bar::TabBar;
pub use task_table::TaskTable;
pub use work_info_modal::WorkInfoModal;
