mod gradient_check;
