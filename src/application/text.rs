/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// Any non-alphabetic character (space, digit, apostrophe, hyphen) starts a
/// new run, so `"pão-de-queijo"` becomes `"Pão-De-Queijo"`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
