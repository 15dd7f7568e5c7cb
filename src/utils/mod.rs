pub mod url_validator;

/// 短码字母表（62 个字符）
pub const SHORTCODE_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 生成指定长度的随机短码，每个字符在字母表中均匀选取
pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| {
        SHORTCODE_ALPHABET[rand::random_range(0..SHORTCODE_ALPHABET.len())] as char
    })
    .take(length)
    .collect()
}

/// 检查用户提供的短码是否合法：非空，且仅包含 ASCII 字母和数字
pub fn is_valid_shortcode(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
