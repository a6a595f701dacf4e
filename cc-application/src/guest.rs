use super::*;

/// Fixed placeholder identity that owns all writes
/// in lieu of real authentication.
pub const GUEST_USERNAME: &str = "guest";

pub fn ensure_guest_user(connections: &sqlite::Connections) -> Result<User> {
    let connection = connections.exclusive()?;
    if let Some(user) = connection.try_get_user_by_username(GUEST_USERNAME)? {
        return Ok(user);
    }
    info!("Creating the guest user");
    let new_user = NewUser {
        username: GUEST_USERNAME.to_string(),
        // No login exists, so the guest does not need a usable password
        password: String::new(),
        name: Some("Guest".to_string()),
        email: None,
        avatar_url: None,
    };
    Ok(connection.create_user(&new_user)?)
}
