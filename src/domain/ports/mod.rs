mod image_fetch_port;

pub use image_fetch_port::{FetchError, FetchResult, ImageFetchPort};

#[cfg(test)]
pub mod mocks {
    pub use super::image_fetch_port::mock::MockFetchPort;
}
