#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print in function is OK
        "<User Fn - f>"
    }

    tests! {
        call in function is OK
        "3"
    }

    tests! {
        default_return in function is OK
        "null"
        "null"
    }

    tests! {
        recursion in function is OK
        "55"
    }

    tests! {
        returned_function in function is OK
        "inner"
    }

    tests! {
        params_shadow_globals in function is OK
        "param"
        "global"
    }

    tests! {
        local_function in function is OK
        "local"
    }

    tests! {
        wrong_arity in function is ERR
        "Expected 2 arguments but got 1 instead."
        "[line 4]"
    }

    tests! {
        call_non_callable in function is ERR
        "Only classes, functions or methods can be called."
        "[line 2]"
    }

    tests! {
        redefine in function is ERR
        "Cannot reassign a const variable 'f'."
        "[line 2]"
    }
}
