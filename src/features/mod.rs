pub mod command_palette;
pub mod kanban;
