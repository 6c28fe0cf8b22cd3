mod token_proptest;
