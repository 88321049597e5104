mod servant;
