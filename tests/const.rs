#[macro_use]
mod common;

#[cfg(test)]
mod _const {
    tests! {
        declare in const is OK
        "3"
    }

    tests! {
        shadow in const is OK
        "2"
        "1"
    }

    tests! {
        const_expression in const is OK
        "6.28"
    }

    tests! {
        reassign in const is ERR
        "Cannot reassign a const variable 'K'."
        "[line 2]"
    }

    tests! {
        compound_reassign in const is ERR
        "Cannot reassign a const variable 'K'."
        "[line 2]"
    }

    tests! {
        local_reassign in const is ERR
        "Cannot reassign a const variable 'K'."
        "[line 3]"
    }

    tests! {
        without_initializer in const is ERR
        "[line 1] Error at ';': Expect '=' after constant name"
    }
}
