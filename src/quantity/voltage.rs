quantity!(Volts, suffix: " V", precision: 1);
