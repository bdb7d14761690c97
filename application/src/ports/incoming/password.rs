use crate::error::AppResult;

pub trait PasswordUseCase<I: ?Sized>: Send + Sync {
    fn create_password(&self, password: &str) -> AppResult<String>;
    fn update_password(&self, identity: &I, password: &str) -> AppResult<()>;
    fn verify_password(&self, identity: &I, password: &str) -> AppResult<bool>;
}
