mod document_printer_tests;
