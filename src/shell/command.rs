
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    AddStudent,
    ShowStudent,
    Exit,
}
