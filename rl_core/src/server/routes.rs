pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiMessage {
    Generate,
}

impl BackendApiMessage {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiMessage::Generate => ApiPath::Static("/generate"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPing {
    Ping,
}

impl BackendApiPing {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiPing::Ping => ApiPath::Static("/ping"),
        }
    }
}

pub fn print_all_backend_api_paths() {
    for message in [BackendApiMessage::Generate].iter() {
        println!("/api{}", message.path().as_str());
    }

    for ping in [BackendApiPing::Ping].iter() {
        println!("/api{}", ping.path().as_str());
    }
}
