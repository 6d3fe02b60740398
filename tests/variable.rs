#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        shadowing in variable is OK
        "2"
        "1"
    }

    tests! {
        uninitialized in variable is OK
        "null"
    }

    tests! {
        redefine_global in variable is OK
        "2"
    }

    tests! {
        in_block in variable is OK
        "outer"
        "outer inner"
    }

    tests! {
        early_bound in variable is OK
        "global"
        "global"
    }

    tests! {
        duplicate_local in variable is ERR
        "[line 3] Error at 'a': Already a variable with this name in this scope."
    }

    tests! {
        use_local_in_initializer in variable is ERR
        "[line 3] Error at 'a': Cannot read a local variable within its own initializer."
    }

    tests! {
        undefined_global in variable is ERR
        "Undefined variable 'notDefined'."
        "[line 1]"
    }

    tests! {
        undefined_local in variable is ERR
        "Undefined variable 'notDefined'."
        "[line 2]"
    }

    tests! {
        assign_undefined in variable is ERR
        "Undefined variable 'a'."
        "[line 1]"
    }
}
