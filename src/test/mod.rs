pub(crate) mod usecase;
mod strategies;

use ctor::ctor;

#[ctor]
fn logs() {
    env_logger::init();
}
