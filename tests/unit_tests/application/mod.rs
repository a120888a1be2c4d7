mod name_generation_service_test;
