extern "C" {
    fn aa_helper__get_value(name: *const libc::c_char, len: libc::size_t) -> libc::size_t;
}

/// Looks up a `sizeof`/`alignof`/`offsetof` value computed by the C compiler
/// from the system's `aalib.h`.
pub fn get_test_val(name: &str) -> usize {
    let value = unsafe {
        aa_helper__get_value(
            name.as_ptr() as *const libc::c_char,
            name.len() as libc::size_t,
        ) as usize
    };
    assert_ne!(value, usize::MAX, "abi_helper.c has no value named `{}`", name);
    value
}
