use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Response {
    Count { count: usize },
    Success { success: bool },
}

impl Response {
    pub fn count(count: usize) -> Response {
        Response::Count { count }
    }

    pub fn success() -> Response {
        Response::Success { success: true }
    }
}
