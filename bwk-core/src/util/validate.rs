pub use fast_chemail::is_valid_email;

pub const MIN_TENANT_NAME_LEN: usize = 2;

pub fn is_valid_tenant_name(name: &str) -> bool {
    name.trim().len() >= MIN_TENANT_NAME_LEN
}

pub const fn is_valid_capacity(capacity: u32) -> bool {
    capacity > 0
}
