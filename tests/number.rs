#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "1.5"
        "0.25"
    }

    tests! {
        decimal_trim in number is OK
        "2"
        "100"
        "1.5"
    }

    tests! {
        unterminated in number is ERR
        "[line 1] Error: Unterminated number"
    }
}
