// Toast notification enum
#[derive(Clone, Debug, PartialEq)]
pub enum Toaster {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
}

impl Toaster {
    pub fn message(&self) -> &str {
        match self {
            Toaster::Success(msg) => msg,
            Toaster::Error(msg) => msg,
            Toaster::Warning(msg) => msg,
            Toaster::Info(msg) => msg,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Toaster::Success(_) => "Success",
            Toaster::Error(_) => "Error",
            Toaster::Warning(_) => "Warning",
            Toaster::Info(_) => "Info",
        }
    }
}
