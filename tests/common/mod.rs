//! Shared fixtures for the integration tests.

/// The demonstration program the reference driver tokenises.
pub const DEMO_PROGRAM: &str = "\
Procedure Main()
    D = 1234**56/7
    If D>100 then
        Print \"This is a \\\"big\\\" number!\\n\"
    Endif

    For XorVal=1 In 10 Step 2
        Print \"Hello, world!\\n\" + D ;  can i have a comment here?
    Next##
EndProcedure";
